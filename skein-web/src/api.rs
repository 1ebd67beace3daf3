//! The gallery's remote API description.

use skein_api::{Api, Operation, Verb};

/// Remote operations the gallery scripts are generated against.
///
/// The same description drives the server-side router, so URL shapes and
/// verb choices must stay in step with it.
pub fn gallery_api(base_url: impl Into<String>) -> Api {
    Api::new(base_url)
        .operation(Operation::new("postComment", Verb::Post, "/item/:id/comment").with_body())
        .operation(
            Operation::new("setItemDescription", Verb::Post, "/item/:id/description").with_body(),
        )
        .operation(Operation::new("putTags", Verb::Put, "/item/:id/tags").with_body())
        .operation(Operation::new("massTags", Verb::Put, "/tags").with_body())
        .operation(Operation::new("validateToken", Verb::Post, "/token/:name/:id/validate"))
        .operation(Operation::new("deleteToken", Verb::Delete, "/token/:name/:id"))
}
