//! Admin mutations: catalog CRUD, settings replace, credential check, and
//! how an open customer cart reacts to catalog edits.

use feriapp_core::{CatalogError, Price, Product, ProductId, StoreSettings};
use feriapp_integration_tests::seeded_session;
use feriapp_storefront::middleware::auth::credentials_match;

#[test]
fn test_create_product_appends_to_catalog() {
    let mut session = seeded_session();
    let before = session.catalog().len();

    let mut product = session
        .find_product(&ProductId::new("1"))
        .cloned()
        .expect("seed product");
    product.id = ProductId::generate();
    product.title = "Miel Artesanal 500g".to_owned();

    let id = session.create_product(product);
    assert_eq!(session.catalog().len(), before + 1);
    assert_eq!(
        session.find_product(&id).map(|p| p.title.as_str()),
        Some("Miel Artesanal 500g")
    );
}

#[test]
fn test_update_rewrites_the_catalog_entry() {
    let mut session = seeded_session();
    let id = ProductId::new("3");
    let mut edited = session.find_product(&id).cloned().expect("seed product");
    edited.price = Price::new(110);
    edited.stock = 40;

    session.update_product(edited).expect("known id");
    let product = session.find_product(&id).expect("still present");
    assert_eq!(product.price, Price::new(110));
    assert_eq!(product.stock, 40);
}

#[test]
fn test_update_unknown_id_is_an_error() {
    let mut session = seeded_session();
    let mut ghost = session
        .find_product(&ProductId::new("1"))
        .cloned()
        .expect("seed product");
    ghost.id = ProductId::new("ghost");

    assert_eq!(
        session.update_product(ghost),
        Err(CatalogError::UnknownProduct(ProductId::new("ghost")))
    );
}

#[test]
fn test_delete_removes_product_and_its_cart_line() {
    let mut session = seeded_session();
    let id = ProductId::new("1");
    session.add_to_cart(&id).expect("seed product");

    session.delete_product(&id).expect("known id");
    assert!(session.find_product(&id).is_none());
    assert!(session.cart().is_empty());
}

#[test]
fn test_stock_reduction_clamps_open_cart() {
    let mut session = seeded_session();
    let id = ProductId::new("4"); // Pack Desayuno, stock 5
    session.add_to_cart(&id).expect("seed product");
    session.adjust_quantity(&id, 4);
    assert_eq!(session.cart().quantity_of(&id), Some(5));

    let mut edited = session.find_product(&id).cloned().expect("seed product");
    edited.stock = 2;
    session.update_product(edited).expect("known id");

    assert_eq!(session.cart().quantity_of(&id), Some(2));
}

#[test]
fn test_settings_full_replace() {
    let mut session = seeded_session();
    let settings = StoreSettings {
        is_open: false,
        location_name: "Feria de Tristán Narvaja".to_owned(),
        delivery_cost: Price::new(250),
        whatsapp_number: "59891000000".to_owned(),
        profile_image: String::new(),
    };

    session.replace_settings(settings.clone());
    assert_eq!(session.settings(), &settings);
}

#[test]
fn test_admin_credentials_are_exact_literals() {
    assert!(credentials_match("admin@feria.com", "admin"));
    assert!(!credentials_match("admin@feria.com", "Admin"));
    assert!(!credentials_match("someone@else.com", "admin"));
}

#[test]
fn test_created_product_is_immediately_visible_to_customers() {
    let mut session = seeded_session();
    let mut product: Product = session
        .find_product(&ProductId::new("2"))
        .cloned()
        .expect("seed product");
    product.id = ProductId::generate();
    product.title = "Dulce de Membrillo".to_owned();
    product.keywords = vec!["postre".to_owned()];
    let id = session.create_product(product);

    let visible = session.filtered_products(feriapp_core::CategoryFilter::All, "membrillo");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible.first().map(|p| &p.id), Some(&id));
}
