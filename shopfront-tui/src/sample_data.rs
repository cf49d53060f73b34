//! Built-in demo catalog shown when the app starts.
//!
//! Deterministic fixtures: a spread of categories, a few flash-sale items,
//! one out-of-stock product, and both discounted and full-price entries.

use shopfront_core::domain::Product;

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            name: "Wireless Headphones".into(),
            description: "Over-ear, active noise cancelling, 30h battery.".into(),
            current_price: 79.99,
            previous_price: Some(99.99),
            in_stock: true,
            stock_quantity: 12,
            flash_sale: true,
            category: "Audio".into(),
        },
        Product {
            name: "Mechanical Keyboard".into(),
            description: "Tenkeyless, hot-swappable switches, PBT caps.".into(),
            current_price: 129.00,
            previous_price: None,
            in_stock: true,
            stock_quantity: 8,
            flash_sale: false,
            category: "Peripherals".into(),
        },
        Product {
            name: "4K Webcam".into(),
            description: "Autofocus, dual mics, privacy shutter.".into(),
            current_price: 89.50,
            previous_price: Some(119.00),
            in_stock: true,
            stock_quantity: 23,
            flash_sale: true,
            category: "Peripherals".into(),
        },
        Product {
            name: "Portable SSD 1TB".into(),
            description: "USB-C, 1050 MB/s reads, pocket sized.".into(),
            current_price: 99.99,
            previous_price: None,
            in_stock: true,
            stock_quantity: 41,
            flash_sale: false,
            category: "Storage".into(),
        },
        Product {
            name: "Smart Desk Lamp".into(),
            description: "Adjustable color temperature, app-free presets.".into(),
            current_price: 34.99,
            previous_price: Some(49.99),
            in_stock: false,
            stock_quantity: 0,
            flash_sale: false,
            category: "Home Office".into(),
        },
        Product {
            name: "Ergonomic Mouse".into(),
            description: "Vertical grip, six buttons, silent clicks.".into(),
            current_price: 44.90,
            previous_price: None,
            in_stock: true,
            stock_quantity: 17,
            flash_sale: false,
            category: "Peripherals".into(),
        },
        Product {
            name: "USB-C Dock".into(),
            description: "Dual HDMI, 2.5GbE, 100W passthrough.".into(),
            current_price: 149.00,
            previous_price: Some(189.00),
            in_stock: true,
            stock_quantity: 5,
            flash_sale: true,
            category: "Docks".into(),
        },
        Product {
            name: "Laptop Stand".into(),
            description: "Aluminium, foldable, fits 13-16 inch.".into(),
            current_price: 27.50,
            previous_price: None,
            in_stock: true,
            stock_quantity: 60,
            flash_sale: false,
            category: "Home Office".into(),
        },
    ]
}
