//! Static catalog data.
//!
//! The catalog is fixed at build time. Products carry whole-rupee base
//! prices; variants are derived on demand from the color x size
//! cross-product and are never stored.

use printforge_core::{Price, ProductId};

use super::{Category, Product, ProductKind};

/// All catalog categories, in display order.
pub const CATEGORIES: &[Category] = &[
    Category {
        id: 1,
        key: "t-shirts",
        name: "T-Shirts",
        products: T_SHIRTS,
    },
    Category {
        id: 2,
        key: "hoodies",
        name: "Hoodies",
        products: HOODIES,
    },
    Category {
        id: 3,
        key: "mugs",
        name: "Mugs",
        products: MUGS,
    },
    Category {
        id: 4,
        key: "caps",
        name: "Caps & Hats",
        products: CAPS,
    },
];

const T_SHIRTS: &[Product] = &[
    Product {
        id: ProductId::new(71),
        title: "Unisex Staple T-Shirt | Bella + Canvas 3001",
        description: "This classic unisex jersey short sleeve tee fits like a well-loved favorite. Soft cotton and quality print make for a great staple piece.",
        kind: ProductKind::TShirt,
        brand: "Bella + Canvas",
        image: "/white-unisex-t-shirt-product-photo.jpg",
        color_images: &[
            ("White", "/white-plain-t-shirt-front-view-product-photo.jpg"),
            ("Black", "/black-plain-t-shirt-front-view-product-photo.jpg"),
            ("Navy", "/navy-blue-plain-t-shirt-front-view-product-photo.jpg"),
            ("Red", "/red-plain-t-shirt-front-view-product-photo.jpg"),
            ("Forest Green", "/forest-green-plain-t-shirt-front-view-product-phot.jpg"),
            ("Heather Grey", "/heather-grey-plain-t-shirt-front-view-product-phot.jpg"),
        ],
        base_price: Price::new(799),
        colors: &["White", "Black", "Navy", "Red", "Forest Green", "Heather Grey"],
        sizes: &["S", "M", "L", "XL", "2XL", "3XL"],
    },
    Product {
        id: ProductId::new(145),
        title: "Unisex Premium T-Shirt | Bella + Canvas 3001",
        description: "Premium quality t-shirt with a modern fit. Perfect for custom designs and everyday wear.",
        kind: ProductKind::TShirt,
        brand: "Bella + Canvas",
        image: "/premium-black-t-shirt-product-photo.jpg",
        color_images: &[
            ("White", "/white-premium-t-shirt-front-view-product-photo.jpg"),
            ("Black", "/black-premium-t-shirt-front-view-product-photo.jpg"),
            ("Navy", "/navy-blue-premium-t-shirt-front-view-product-photo.jpg"),
            ("Charcoal", "/charcoal-grey-premium-t-shirt-front-view-product-p.jpg"),
            ("Maroon", "/maroon-premium-t-shirt-front-view-product-photo.jpg"),
        ],
        base_price: Price::new(899),
        colors: &["White", "Black", "Navy", "Charcoal", "Maroon"],
        sizes: &["S", "M", "L", "XL", "2XL"],
    },
    Product {
        id: ProductId::new(380),
        title: "Unisex Organic Cotton T-Shirt",
        description: "Eco-friendly organic cotton t-shirt. Sustainable fashion meets quality printing.",
        kind: ProductKind::TShirt,
        brand: "Stanley/Stella",
        image: "/organic-cotton-t-shirt-eco-friendly.jpg",
        color_images: &[
            ("White", "/white-organic-cotton-t-shirt-front-view.jpg"),
            ("Black", "/black-organic-cotton-t-shirt-front-view.jpg"),
            ("French Navy", "/french-navy-organic-cotton-t-shirt-front-view.jpg"),
            ("Desert Dust", "/desert-dust-beige-organic-cotton-t-shirt-front-vie.jpg"),
        ],
        base_price: Price::new(1099),
        colors: &["White", "Black", "French Navy", "Desert Dust"],
        sizes: &["XS", "S", "M", "L", "XL", "2XL"],
    },
];

const HOODIES: &[Product] = &[
    Product {
        id: ProductId::new(146),
        title: "Unisex Heavy Blend Hoodie | Gildan 18500",
        description: "A cozy blend of cotton and polyester that keeps you warm and looks great with your custom design.",
        kind: ProductKind::Hoodie,
        brand: "Gildan",
        image: "/black-hoodie-sweatshirt-product-photo.jpg",
        color_images: &[
            ("White", "/white-heavy-blend-hoodie-front-view.jpg"),
            ("Black", "/black-heavy-blend-hoodie-front-view.jpg"),
            ("Navy", "/navy-heavy-blend-hoodie-front-view.jpg"),
            ("Sport Grey", "/sport-grey-heavy-blend-hoodie-front-view.jpg"),
            ("Maroon", "/maroon-heavy-blend-hoodie-front-view.jpg"),
            ("Forest Green", "/forest-green-heavy-blend-hoodie-front-view.jpg"),
        ],
        base_price: Price::new(1999),
        colors: &["White", "Black", "Navy", "Sport Grey", "Maroon", "Forest Green"],
        sizes: &["S", "M", "L", "XL", "2XL", "3XL"],
    },
    Product {
        id: ProductId::new(293),
        title: "Premium Pullover Hoodie | Bella + Canvas 3719",
        description: "Ultra-soft fleece hoodie with a modern fit. Perfect for custom artwork.",
        kind: ProductKind::Hoodie,
        brand: "Bella + Canvas",
        image: "/grey-premium-pullover-hoodie.jpg",
        color_images: &[
            ("White", "/white-premium-pullover-hoodie-front-view.jpg"),
            ("Black", "/black-premium-pullover-hoodie-front-view.jpg"),
            ("Heather Grey", "/heather-grey-premium-pullover-hoodie-front-view.jpg"),
            ("Navy", "/navy-premium-pullover-hoodie-front-view.jpg"),
        ],
        base_price: Price::new(2499),
        colors: &["White", "Black", "Heather Grey", "Navy"],
        sizes: &["S", "M", "L", "XL", "2XL"],
    },
    Product {
        id: ProductId::new(381),
        title: "Zip-Up Hoodie | Independent Trading",
        description: "Classic zip-up hoodie with front pockets. Great for layering.",
        kind: ProductKind::Hoodie,
        brand: "Independent Trading",
        image: "/zip-up-hoodie-navy-blue.jpg",
        color_images: &[
            ("Black", "/black-zip-up-hoodie-front-view.jpg"),
            ("Navy", "/navy-zip-up-hoodie-front-view.jpg"),
            ("Charcoal", "/charcoal-zip-up-hoodie-front-view.jpg"),
            ("Heather Grey", "/heather-grey-zip-up-hoodie-front-view.jpg"),
        ],
        base_price: Price::new(2299),
        colors: &["Black", "Navy", "Charcoal", "Heather Grey"],
        sizes: &["S", "M", "L", "XL", "2XL"],
    },
];

const MUGS: &[Product] = &[
    Product {
        id: ProductId::new(19),
        title: "White Glossy Mug 11oz",
        description: "Classic ceramic mug with a glossy finish. Dishwasher and microwave safe.",
        kind: ProductKind::Mug,
        brand: "Generic",
        image: "/white-ceramic-coffee-mug.jpg",
        color_images: &[("White", "/white-glossy-mug-11oz-front-view.jpg")],
        base_price: Price::new(599),
        colors: &["White"],
        sizes: &["11oz"],
    },
    Product {
        id: ProductId::new(218),
        title: "White Glossy Mug 15oz",
        description: "Larger ceramic mug for those who need more coffee. Vibrant print quality.",
        kind: ProductKind::Mug,
        brand: "Generic",
        image: "/large-white-ceramic-mug-15oz.jpg",
        color_images: &[("White", "/white-glossy-mug-15oz-front-view.jpg")],
        base_price: Price::new(699),
        colors: &["White"],
        sizes: &["15oz"],
    },
    Product {
        id: ProductId::new(383),
        title: "Black Mug 11oz",
        description: "Sleek black ceramic mug. Stand out with your design on a dark background.",
        kind: ProductKind::Mug,
        brand: "Generic",
        image: "/black-ceramic-coffee-mug.jpg",
        color_images: &[("Black", "/black-glossy-mug-11oz-front-view.jpg")],
        base_price: Price::new(699),
        colors: &["Black"],
        sizes: &["11oz"],
    },
];

const CAPS: &[Product] = &[
    Product {
        id: ProductId::new(206),
        title: "Dad Hat | Yupoong 6245CM",
        description: "Classic low-profile dad hat with adjustable strap. Embroidered design.",
        kind: ProductKind::Hat,
        brand: "Yupoong",
        image: "/dad-hat-baseball-cap-khaki.jpg",
        color_images: &[
            ("White", "/placeholder.svg?height=600&width=600"),
            ("Black", "/placeholder.svg?height=600&width=600"),
            ("Navy", "/placeholder.svg?height=600&width=600"),
            ("Khaki", "/placeholder.svg?height=600&width=600"),
            ("Red", "/placeholder.svg?height=600&width=600"),
        ],
        base_price: Price::new(1299),
        colors: &["White", "Black", "Navy", "Khaki", "Red"],
        sizes: &["One Size"],
    },
    Product {
        id: ProductId::new(376),
        title: "Snapback Hat | Yupoong 6089M",
        description: "Flat bill snapback with structured crown. Bold embroidery options.",
        kind: ProductKind::Hat,
        brand: "Yupoong",
        image: "/snapback-hat-flat-bill-black.jpg",
        color_images: &[
            ("Black", "/placeholder.svg?height=600&width=600"),
            ("Navy", "/placeholder.svg?height=600&width=600"),
            ("Red", "/placeholder.svg?height=600&width=600"),
            ("Grey", "/placeholder.svg?height=600&width=600"),
        ],
        base_price: Price::new(1499),
        colors: &["Black", "Navy", "Red", "Grey"],
        sizes: &["One Size"],
    },
    Product {
        id: ProductId::new(439),
        title: "Trucker Cap | Richardson 112",
        description: "Classic trucker style with mesh back. Breathable and stylish.",
        kind: ProductKind::Hat,
        brand: "Richardson",
        image: "/trucker-cap-mesh-back.jpg",
        color_images: &[
            ("Black/White", "/placeholder.svg?height=600&width=600"),
            ("Navy/White", "/placeholder.svg?height=600&width=600"),
            ("Charcoal/White", "/placeholder.svg?height=600&width=600"),
        ],
        base_price: Price::new(1399),
        colors: &["Black/White", "Navy/White", "Charcoal/White"],
        sizes: &["One Size"],
    },
];

/// Swatch hex codes for known color names. Unknown colors render black.
pub const COLOR_CODES: &[(&str, &str)] = &[
    ("White", "#FFFFFF"),
    ("Black", "#000000"),
    ("Navy", "#1a365d"),
    ("Red", "#dc2626"),
    ("Forest Green", "#228B22"),
    ("Heather Grey", "#9ca3af"),
    ("Grey", "#6b7280"),
    ("Charcoal", "#374151"),
    ("Maroon", "#7f1d1d"),
    ("Khaki", "#c4b097"),
    ("Sport Grey", "#6b7280"),
    ("French Navy", "#1e3a5f"),
    ("Desert Dust", "#d4c4b0"),
    ("Black/White", "#000000"),
    ("Navy/White", "#1a365d"),
    ("Charcoal/White", "#374151"),
];
