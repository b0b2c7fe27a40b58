//! Demo catalog and initial store settings.
//!
//! There is no database: the session store is seeded with this catalog at
//! startup and mutated in memory from there.

use feriapp_core::{Category, Price, Product, ProductId, StoreSettings, StoreState, Unit};

/// Initial store settings.
#[must_use]
pub fn initial_settings() -> StoreSettings {
    StoreSettings {
        is_open: true,
        location_name: "Feria de los Domingos - Puesto 42".to_owned(),
        delivery_cost: Price::new(200),
        whatsapp_number: "59899123456".to_owned(),
        profile_image:
            "https://images.unsplash.com/photo-1581456495146-65a71b2c8e52?auto=format&fit=crop&q=80&w=600"
                .to_owned(),
    }
}

/// The demo catalog.
#[must_use]
pub fn mock_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            internal_code: "G0001".to_owned(),
            barcode: Some("7730001".to_owned()),
            title: "Shampoo Herbal 400ml".to_owned(),
            description: "Brillo intenso y aroma natural para toda la familia.".to_owned(),
            price: Price::new(350),
            old_price: None,
            stock: 12,
            unit: Unit::Un,
            image:
                "https://images.unsplash.com/photo-1535585209827-a15fcdbc4c2d?auto=format&fit=crop&q=80&w=300"
                    .to_owned(),
            category: Category::Higiene,
            is_pack: false,
            available: true,
            keywords: string_vec(&["champu", "pelo", "cabello", "lavar"]),
        },
        Product {
            id: ProductId::new("2"),
            internal_code: "G0002".to_owned(),
            barcode: Some("7730002".to_owned()),
            title: "Aceite de Oliva Extra Virgen".to_owned(),
            description: "Primera prensada en frío. Acidez menor a 0.5%.".to_owned(),
            price: Price::new(480),
            old_price: Some(Price::new(550)),
            stock: 8,
            unit: Unit::Lt,
            image:
                "https://images.unsplash.com/photo-1474979266404-7eaacbcd87c5?auto=format&fit=crop&q=80&w=300"
                    .to_owned(),
            category: Category::Almacen,
            is_pack: false,
            available: true,
            keywords: string_vec(&["cocina", "aderezo", "ensalada", "aceituna"]),
        },
        Product {
            id: ProductId::new("3"),
            internal_code: "G0003".to_owned(),
            barcode: Some("7730003".to_owned()),
            title: "Arroz Blanco Premium 1kg".to_owned(),
            description: "Grano largo y fino, no se pasa nunca.".to_owned(),
            price: Price::new(95),
            old_price: None,
            stock: 50,
            unit: Unit::Un,
            image:
                "https://images.unsplash.com/photo-1586201375761-83865001e31c?auto=format&fit=crop&q=80&w=300"
                    .to_owned(),
            category: Category::Almacen,
            is_pack: false,
            available: true,
            keywords: string_vec(&["guiso", "comida", "grano"]),
        },
        Product {
            id: ProductId::new("4"),
            internal_code: "G0004".to_owned(),
            barcode: Some("7730004".to_owned()),
            title: "Pack Desayuno Completo".to_owned(),
            description: "Incluye: Café, Azúcar y 2 Paquetes de Galletitas.".to_owned(),
            price: Price::new(450),
            old_price: Some(Price::new(520)),
            stock: 5,
            unit: Unit::Pack,
            image:
                "https://images.unsplash.com/photo-1504754524776-8f4f37790ca0?auto=format&fit=crop&q=80&w=300"
                    .to_owned(),
            category: Category::Packs,
            is_pack: true,
            available: true,
            keywords: string_vec(&["oferta", "promo", "cafe", "mañana"]),
        },
        Product {
            id: ProductId::new("5"),
            internal_code: "G0005".to_owned(),
            barcode: Some("7730005".to_owned()),
            title: "Fideos Tallarines al Huevo".to_owned(),
            description: "Pasta seca estilo casero, cocción en 8 minutos.".to_owned(),
            price: Price::new(85),
            old_price: None,
            stock: 24,
            unit: Unit::Un,
            image:
                "https://images.unsplash.com/photo-1612929633738-8fe44f7ec841?auto=format&fit=crop&q=80&w=300"
                    .to_owned(),
            category: Category::Almacen,
            is_pack: false,
            available: true,
            keywords: string_vec(&["pasta", "italiana", "harina"]),
        },
        Product {
            id: ProductId::new("6"),
            internal_code: "G0006".to_owned(),
            barcode: Some("7730006".to_owned()),
            title: "Jabón Líquido para Ropa 3L".to_owned(),
            description: "Limpieza profunda y perfume duradero.".to_owned(),
            price: Price::new(290),
            old_price: None,
            stock: 10,
            unit: Unit::Un,
            image:
                "https://images.unsplash.com/photo-1585833816754-144c4f3a743c?auto=format&fit=crop&q=80&w=300"
                    .to_owned(),
            category: Category::Limpieza,
            is_pack: false,
            available: true,
            keywords: string_vec(&["lavado", "ropa", "detergente", "suavizante"]),
        },
        Product {
            id: ProductId::new("7"),
            internal_code: "G0007".to_owned(),
            barcode: Some("7730007".to_owned()),
            title: "Pack Limpieza Total".to_owned(),
            description: "Lavandina 2L + Detergente 1L + Esponja.".to_owned(),
            price: Price::new(180),
            old_price: Some(Price::new(220)),
            stock: 15,
            unit: Unit::Pack,
            image:
                "https://images.unsplash.com/photo-1563453392212-326f5e854473?auto=format&fit=crop&q=80&w=300"
                    .to_owned(),
            category: Category::Packs,
            is_pack: true,
            available: true,
            keywords: string_vec(&["oferta", "combo", "casa"]),
        },
    ]
}

/// A freshly seeded session store.
#[must_use]
pub fn seeded_store() -> StoreState {
    StoreState::new(mock_products(), initial_settings())
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|&s| s.to_owned()).collect()
}
