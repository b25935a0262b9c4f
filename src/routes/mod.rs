mod admin;
mod billboards;
mod categories;
mod health;
mod login;
mod products;
mod search;
mod upstream;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::{middleware::admin_middleware, AppState};

pub fn create_router() -> Router<AppState> {
    let admin_routes = Router::new()
        .route(
            "/admin/products",
            get(admin::list_products).post(admin::create_product),
        )
        .route(
            "/admin/products/{id}",
            patch(admin::update_product).delete(admin::delete_product),
        )
        .route(
            "/admin/products/{id}/images",
            post(admin::generate_product_image_urls),
        )
        .route(
            "/admin/products/{id}/featured",
            put(admin::add_featured).delete(admin::remove_featured),
        )
        .route("/admin/categories", post(admin::create_category))
        .route(
            "/admin/categories/{id}",
            patch(admin::update_category).delete(admin::delete_category),
        )
        .route(
            "/admin/colors",
            get(admin::get_all_colors).post(admin::create_color),
        )
        .route("/admin/colors/{id}", delete(admin::delete_color))
        .route(
            "/admin/sizes",
            get(admin::get_all_sizes).post(admin::create_size),
        )
        .route("/admin/sizes/{id}", delete(admin::delete_size))
        .route(
            "/admin/discounts",
            get(admin::get_all_discounts).post(admin::create_discount),
        )
        .route(
            "/admin/discounts/{id}",
            get(admin::get_discount)
                .patch(admin::update_discount)
                .delete(admin::delete_discount),
        )
        .route(
            "/admin/billboards",
            get(admin::get_all_billboards).post(admin::create_billboard),
        )
        .route(
            "/admin/billboards/{id}",
            patch(admin::update_billboard).delete(admin::delete_billboard),
        )
        .layer(axum_middleware::from_fn(admin_middleware));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/products", get(products::get_products))
        .route("/products/featured", get(products::get_featured_products))
        .route("/products/{id}", get(products::get_product))
        .route("/search", get(search::search_catalog))
        .route("/categories", get(categories::get_all_categories))
        .route("/categories/{id}", get(categories::get_category))
        .route("/billboards", get(billboards::get_active_billboards))
        .route("/upstream/products", get(upstream::get_products))
        .route("/upstream/categories", get(upstream::get_categories))
        .route("/upstream/discounts", get(upstream::get_discounts))
        .route("/upstream/billboards", get(upstream::get_billboards))
        .route("/admin/login", post(login::login_admin))
        .merge(admin_routes)
}
