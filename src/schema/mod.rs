/// GraphQL schema assembly for the film catalog
///
/// This module declares the catalog's object types, binds the root query
/// fields to their resolvers, and builds the executable schema.

mod builder;
mod resolver;
mod scalars;

pub use builder::SchemaBuilder;
pub use resolver::{create_film_resolver, create_list_resolver, film_to_value};
pub use scalars::register_custom_scalars;
