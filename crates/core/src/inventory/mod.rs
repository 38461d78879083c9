mod error;
mod event;
mod requests;
mod responses;
mod routing;
mod types;

pub use error::RequestError;
pub use event::InboundEvent;
pub use requests::{parse_body, parse_item, DeleteProductRequest, UpdateProductRequest};
pub use responses::{
    ApiResponse, DeleteResponse, ErrorMessage, Operation, ProductsResponse, SaveResponse,
    UpdateResponse, CONTENT_TYPE, INTERNAL_ERROR_MESSAGE, NOT_FOUND_MESSAGE, SUCCESS_MESSAGE,
};
pub use routing::{
    match_route, Route, RoutePaths, DEFAULT_HEALTH_PATH, DEFAULT_PRODUCTS_PATH,
    DEFAULT_PRODUCT_PATH,
};
pub use types::{product_id, ContinuationToken, Item, Page, UpdateDirective, DEFAULT_PRODUCT_KEY};
