//! Built-in storefront catalog.

use chrono::{DateTime, NaiveDate, Utc};
use common::{CategoryId, ProductId};

use super::{Category, Product, Ratings};
use crate::money::Money;

struct ProductDef {
    id: u64,
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    price_cents: i64,
    compare_at_cents: Option<i64>,
    images: [&'static str; 2],
    category: &'static str,
    tags: [&'static str; 4],
    stock: u32,
    rating: (f64, u32),
    featured: bool,
    new: bool,
    listed: (i32, u32, u32),
}

const PRODUCTS: [ProductDef; 8] = [
    ProductDef {
        id: 1,
        name: "Minimalist Desk Lamp",
        slug: "minimalist-desk-lamp",
        description: "A sleek, adjustable desk lamp with touch controls and multiple brightness settings. Perfect for your home office or study area.",
        price_cents: 8999,
        compare_at_cents: Some(11999),
        images: [
            "https://images.unsplash.com/photo-1507473885765-e6ed057f782c?q=80&w=266&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1534115509038-2c01d01f3922?q=80&w=1887&auto=format&fit=crop",
        ],
        category: "Home Office",
        tags: ["lighting", "desk", "home office", "minimalist"],
        stock: 45,
        rating: (4.7, 28),
        featured: true,
        new: false,
        listed: (2023, 9, 15),
    },
    ProductDef {
        id: 2,
        name: "Ergonomic Office Chair",
        slug: "ergonomic-office-chair",
        description: "High-quality ergonomic chair with lumbar support, adjustable height, and breathable mesh back. Designed for comfort during long work hours.",
        price_cents: 24999,
        compare_at_cents: Some(29999),
        images: [
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?q=80&w=2070&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1580480055273-228ff5388ef8?q=80&w=2000&auto=format&fit=crop",
        ],
        category: "Furniture",
        tags: ["chair", "office", "ergonomic", "furniture"],
        stock: 18,
        rating: (4.9, 42),
        featured: true,
        new: true,
        listed: (2023, 10, 5),
    },
    ProductDef {
        id: 3,
        name: "Wireless Earbuds",
        slug: "wireless-earbuds",
        description: "Premium wireless earbuds with active noise cancellation, crystal-clear sound, and long battery life. Includes wireless charging case.",
        price_cents: 12999,
        compare_at_cents: Some(14999),
        images: [
            "https://images.unsplash.com/photo-1572569511254-d8f925fe2cbb?q=80&w=1978&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1590658268037-6bf12165a8df?q=80&w=1889&auto=format&fit=crop",
        ],
        category: "Electronics",
        tags: ["earbuds", "audio", "wireless", "music"],
        stock: 62,
        rating: (4.5, 107),
        featured: true,
        new: true,
        listed: (2023, 11, 1),
    },
    ProductDef {
        id: 4,
        name: "Smart Watch",
        slug: "smart-watch",
        description: "Feature-packed smartwatch with health monitoring, notifications, GPS, and a vibrant touchscreen display. Compatible with iOS and Android.",
        price_cents: 19999,
        compare_at_cents: Some(22999),
        images: [
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?q=80&w=1999&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1579586337278-3befd40fd17a?q=80&w=1772&auto=format&fit=crop",
        ],
        category: "Electronics",
        tags: ["smart watch", "wearable", "fitness", "tech"],
        stock: 27,
        rating: (4.6, 89),
        featured: true,
        new: false,
        listed: (2023, 8, 15),
    },
    ProductDef {
        id: 5,
        name: "Portable Bluetooth Speaker",
        slug: "portable-bluetooth-speaker",
        description: "Waterproof Bluetooth speaker with 360° sound, 20-hour battery life, and durable design. Perfect for outdoor activities and parties.",
        price_cents: 7999,
        compare_at_cents: None,
        images: [
            "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?q=80&w=2069&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1589003077984-894e133dabab?q=80&w=1964&auto=format&fit=crop",
        ],
        category: "Electronics",
        tags: ["speaker", "bluetooth", "audio", "portable"],
        stock: 35,
        rating: (4.4, 53),
        featured: false,
        new: true,
        listed: (2023, 12, 1),
    },
    ProductDef {
        id: 6,
        name: "Leather Laptop Sleeve",
        slug: "leather-laptop-sleeve",
        description: "Handcrafted genuine leather sleeve for laptops up to 15 inches. Features a soft microfiber lining and magnetic closure.",
        price_cents: 5999,
        compare_at_cents: None,
        images: [
            "https://images.unsplash.com/photo-1495465798138-718f86d1a4bc?q=80&w=2070&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1547043736-b2247cb88ff7?q=80&w=2070&auto=format&fit=crop",
        ],
        category: "Accessories",
        tags: ["laptop", "sleeve", "leather", "accessories"],
        stock: 42,
        rating: (4.8, 19),
        featured: false,
        new: false,
        listed: (2023, 7, 10),
    },
    ProductDef {
        id: 7,
        name: "Smart Home Security Camera",
        slug: "smart-home-security-camera",
        description: "HD security camera with night vision, motion detection, and two-way audio. Connects to your smartphone for real-time monitoring.",
        price_cents: 11999,
        compare_at_cents: Some(14999),
        images: [
            "https://images.unsplash.com/photo-1557200134-90327ee9fafa?q=80&w=1170&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1626426775115-b9c1b93877b7?q=80&w=1964&auto=format&fit=crop",
        ],
        category: "Smart Home",
        tags: ["security", "camera", "smart home", "wifi"],
        stock: 23,
        rating: (4.3, 37),
        featured: false,
        new: false,
        listed: (2023, 9, 20),
    },
    ProductDef {
        id: 8,
        name: "Minimalist Wall Clock",
        slug: "minimalist-wall-clock",
        description: "Silent wall clock with a clean, modern design. Features a non-ticking mechanism and is perfect for living rooms, offices, or bedrooms.",
        price_cents: 3999,
        compare_at_cents: None,
        images: [
            "https://images.unsplash.com/photo-1488991975158-0bb365999a3c?q=80&w=1949&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1554926272-866d7738ca1c?q=80&w=1974&auto=format&fit=crop",
        ],
        category: "Home Decor",
        tags: ["clock", "wall", "minimalist", "decor"],
        stock: 55,
        rating: (4.7, 24),
        featured: false,
        new: false,
        listed: (2023, 6, 5),
    },
];

const CATEGORIES: [(u64, &str, &str, &str, &str); 8] = [
    (
        1,
        "Electronics",
        "electronics",
        "https://images.unsplash.com/photo-1550009158-9ebf69173e03?q=80&w=1801&auto=format&fit=crop",
        "Latest gadgets and electronic devices",
    ),
    (
        2,
        "Clothing",
        "clothing",
        "https://images.unsplash.com/photo-1567401893414-76b7b1e5a7a5?q=80&w=2070&auto=format&fit=crop",
        "Fashion and apparel for all seasons",
    ),
    (
        3,
        "Home & Kitchen",
        "home-kitchen",
        "https://images.unsplash.com/photo-1556911220-e15b29be8c8f?q=80&w=2070&auto=format&fit=crop",
        "Everything for your home",
    ),
    (
        4,
        "Furniture",
        "furniture",
        "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?q=80&w=2070&auto=format&fit=crop",
        "Stylish and functional furniture",
    ),
    (
        5,
        "Home Office",
        "home-office",
        "https://images.unsplash.com/photo-1593062096033-9a26b09da705?q=80&w=2070&auto=format&fit=crop",
        "Create your perfect workspace",
    ),
    (
        6,
        "Accessories",
        "accessories",
        "https://images.unsplash.com/photo-1611923134239-2cbe6c8a1c9a?q=80&w=2070&auto=format&fit=crop",
        "Complete your look with accessories",
    ),
    (
        7,
        "Smart Home",
        "smart-home",
        "https://images.unsplash.com/photo-1558002038-2a738451c364?q=80&w=2070&auto=format&fit=crop",
        "Make your home smarter with technology",
    ),
    (
        8,
        "Home Decor",
        "home-decor",
        "https://images.unsplash.com/photo-1615800002234-05c4d488696c?q=80&w=2070&auto=format&fit=crop",
        "Decorate your space with style",
    ),
];

fn midnight_utc((year, month, day): (i32, u32, u32)) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

pub(super) fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|def| {
            let listed = midnight_utc(def.listed);
            Product {
                id: ProductId::new(def.id),
                name: def.name.to_string(),
                slug: def.slug.to_string(),
                description: def.description.to_string(),
                price: Money::from_cents(def.price_cents),
                compare_at_price: def.compare_at_cents.map(Money::from_cents),
                images: def.images.iter().map(|s| s.to_string()).collect(),
                category: def.category.to_string(),
                tags: def.tags.iter().map(|s| s.to_string()).collect(),
                stock: def.stock,
                ratings: Some(Ratings {
                    average: def.rating.0,
                    count: def.rating.1,
                }),
                is_featured: def.featured,
                is_new: def.new,
                created_at: listed,
                updated_at: listed,
            }
        })
        .collect()
}

pub(super) fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|&(id, name, slug, image, description)| Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            slug: slug.to_string(),
            image: image.to_string(),
            description: description.to_string(),
        })
        .collect()
}
