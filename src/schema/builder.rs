/// GraphQL schema builder
///
/// This module provides the `SchemaBuilder` which assembles the executable
/// schema for the film catalog: the four object types, the custom scalars,
/// and the root `Query` object with its two resolvers.

use crate::error::{FilmqlError, Result};
use crate::schema::resolver::{
    create_film_resolver, create_list_resolver, object_field, object_list_field,
    scalar_list_field, value_field,
};
use crate::schema::scalars::register_custom_scalars;
use crate::store::FilmStore;

use async_graphql::dynamic::{Object, Schema, TypeRef};
use std::sync::Arc;

/// Schema builder for the film catalog
pub struct SchemaBuilder {
    /// Catalog handed to resolvers through schema context data
    store: Arc<FilmStore>,
}

impl SchemaBuilder {
    /// Create a new schema builder over the given catalog
    pub fn new(store: Arc<FilmStore>) -> Self {
        Self { store }
    }

    /// Build the complete GraphQL schema
    ///
    /// # Returns
    ///
    /// A dynamic GraphQL schema with query resolvers. Fails with
    /// `FilmqlError::SchemaBuild` if the type declarations are inconsistent,
    /// which is a non-recoverable configuration error.
    pub fn build_schema(self) -> Result<Schema> {
        // Build Query type
        let mut query = Object::new("Query");
        query = query.field(create_film_resolver());
        query = query.field(create_list_resolver());

        let mut schema_builder = Schema::build(query.type_name(), None, None);

        // Add custom scalars
        for scalar in register_custom_scalars() {
            schema_builder = schema_builder.register(scalar);
        }

        // Register all catalog types
        for object in [
            author_comment_type(),
            comment_type(),
            author_type(),
            film_type(),
        ] {
            tracing::info!("Registering GraphQL type: {}", object.type_name());
            schema_builder = schema_builder.register(object);
        }

        // Add the Query object
        schema_builder = schema_builder.register(query);

        // Store the catalog in schema data so resolvers can reach it
        let schema = schema_builder
            .data(self.store)
            .finish()
            .map_err(|e| FilmqlError::SchemaBuild(format!("Failed to build schema: {}", e)))?;

        Ok(schema)
    }
}

fn author_comment_type() -> Object {
    Object::new("AuthorComment")
        .field(value_field("name", TypeRef::named(TypeRef::STRING)))
        .field(value_field("email", TypeRef::named(TypeRef::STRING)))
}

fn comment_type() -> Object {
    Object::new("Comment")
        .field(object_field("authorComment", "AuthorComment"))
        .field(value_field("body", TypeRef::named(TypeRef::STRING)))
        .field(value_field("time", TypeRef::named("DateTime")))
}

fn author_type() -> Object {
    Object::new("Author")
        .field(value_field("name", TypeRef::named(TypeRef::STRING)))
        .field(scalar_list_field("films", TypeRef::INT))
}

fn film_type() -> Object {
    Object::new("Film")
        .description("A film in the catalog together with its author and comments")
        .field(value_field("id", TypeRef::named(TypeRef::INT)))
        .field(value_field("title", TypeRef::named(TypeRef::STRING)))
        .field(object_field("author", "Author"))
        .field(value_field("year", TypeRef::named(TypeRef::INT)))
        .field(object_list_field("comments", "Comment"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_schema_succeeds() {
        let builder = SchemaBuilder::new(Arc::new(FilmStore::seed()));
        assert!(builder.build_schema().is_ok());
    }

    #[test]
    fn test_catalog_type_names() {
        assert_eq!(film_type().type_name(), "Film");
        assert_eq!(author_type().type_name(), "Author");
        assert_eq!(comment_type().type_name(), "Comment");
        assert_eq!(author_comment_type().type_name(), "AuthorComment");
    }
}
