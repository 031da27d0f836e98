/// GraphQL resolvers for the film catalog
///
/// This module provides resolver functions for the root query fields, the
/// per-field extractors used by the object types, and the conversion from
/// catalog records to GraphQL values.

use crate::store::{Author, AuthorComment, Comment, Film, FilmStore};

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, InputValue, ResolverContext, TypeRef};
use async_graphql::{Name, Value};
use indexmap::IndexMap;
use std::sync::Arc;

/// Create the film(id) resolver
///
/// Looks the catalog up linearly for a film whose id equals the supplied
/// argument. A missing argument or a miss resolves to null, never an error.
pub fn create_film_resolver() -> Field {
    Field::new(
        "film",
        TypeRef::named("Film"),
        move |ctx: ResolverContext| {
            FieldFuture::new(async move {
                let store = ctx
                    .data::<Arc<FilmStore>>()
                    .map_err(|_e| "Film catalog is not attached to the schema")?;

                let id = match ctx.args.get("id") {
                    Some(value) => value.i64()?,
                    None => return Ok(None),
                };

                tracing::debug!("Looking up film with id {}", id);

                let film = i32::try_from(id).ok().and_then(|id| store.find(id));

                Ok(film.map(|film| FieldValue::owned_any(film_to_value(film))))
            })
        },
    )
    .description("Get Film by id")
    .argument(InputValue::new("id", TypeRef::named(TypeRef::INT)))
}

/// Create the list resolver
///
/// Returns the whole catalog in insertion order, unfiltered.
pub fn create_list_resolver() -> Field {
    Field::new(
        "list",
        TypeRef::named_list("Film"),
        move |ctx: ResolverContext| {
            FieldFuture::new(async move {
                let store = ctx
                    .data::<Arc<FilmStore>>()
                    .map_err(|_e| "Film catalog is not attached to the schema")?;

                tracing::debug!("Listing {} films", store.len());

                let films = store
                    .all()
                    .iter()
                    .map(|film| FieldValue::owned_any(film_to_value(film)))
                    .collect::<Vec<_>>();

                Ok(Some(FieldValue::list(films)))
            })
        },
    )
    .description("Get film list")
}

/// Field whose value is a leaf scalar, extracted from the parent object
pub(crate) fn value_field(name: &str, type_ref: TypeRef) -> Field {
    let key = name.to_string();

    Field::new(name, type_ref, move |ctx| {
        let key = key.clone();
        FieldFuture::new(async move {
            let parent = ctx.parent_value.try_downcast_ref::<Value>()?;

            if let Value::Object(object) = parent {
                if let Some(value) = object.get(key.as_str()) {
                    return Ok(Some(FieldValue::value(value.clone())));
                }
            }

            Ok(Some(FieldValue::NULL))
        })
    })
}

/// Field whose value is a list of leaf scalars
pub(crate) fn scalar_list_field(name: &str, item_type: &str) -> Field {
    let key = name.to_string();

    Field::new(name, TypeRef::named_list(item_type), move |ctx| {
        let key = key.clone();
        FieldFuture::new(async move {
            let parent = ctx.parent_value.try_downcast_ref::<Value>()?;

            if let Value::Object(object) = parent {
                if let Some(Value::List(items)) = object.get(key.as_str()) {
                    return Ok(Some(FieldValue::list(
                        items.iter().cloned().map(FieldValue::value),
                    )));
                }
            }

            Ok(Some(FieldValue::NULL))
        })
    })
}

/// Field whose value is a nested object
///
/// The extracted object is re-wrapped so the nested type's own field
/// resolvers can extract from it in turn.
pub(crate) fn object_field(name: &str, type_name: &str) -> Field {
    let key = name.to_string();

    Field::new(name, TypeRef::named(type_name), move |ctx| {
        let key = key.clone();
        FieldFuture::new(async move {
            let parent = ctx.parent_value.try_downcast_ref::<Value>()?;

            if let Value::Object(object) = parent {
                if let Some(value) = object.get(key.as_str()) {
                    return Ok(Some(FieldValue::owned_any(value.clone())));
                }
            }

            Ok(Some(FieldValue::NULL))
        })
    })
}

/// Field whose value is a list of nested objects
pub(crate) fn object_list_field(name: &str, type_name: &str) -> Field {
    let key = name.to_string();

    Field::new(name, TypeRef::named_list(type_name), move |ctx| {
        let key = key.clone();
        FieldFuture::new(async move {
            let parent = ctx.parent_value.try_downcast_ref::<Value>()?;

            if let Value::Object(object) = parent {
                if let Some(Value::List(items)) = object.get(key.as_str()) {
                    return Ok(Some(FieldValue::list(
                        items.iter().cloned().map(FieldValue::owned_any),
                    )));
                }
            }

            Ok(Some(FieldValue::NULL))
        })
    })
}

/// Convert a film record to a GraphQL Value (Object)
///
/// Field order matches the declared type so serialized output stays
/// deterministic.
pub fn film_to_value(film: &Film) -> Value {
    let mut object = IndexMap::new();

    object.insert(Name::new("id"), Value::Number(film.id.into()));
    object.insert(Name::new("title"), Value::String(film.title.clone()));
    object.insert(Name::new("author"), author_to_value(&film.author));
    object.insert(Name::new("year"), Value::Number(film.year.into()));
    object.insert(
        Name::new("comments"),
        Value::List(film.comments.iter().map(comment_to_value).collect()),
    );

    Value::Object(object)
}

fn author_to_value(author: &Author) -> Value {
    let mut object = IndexMap::new();

    object.insert(Name::new("name"), Value::String(author.name.clone()));
    object.insert(
        Name::new("films"),
        Value::List(
            author
                .films
                .iter()
                .map(|id| Value::Number((*id).into()))
                .collect(),
        ),
    );

    Value::Object(object)
}

fn comment_to_value(comment: &Comment) -> Value {
    let mut object = IndexMap::new();

    object.insert(
        Name::new("authorComment"),
        author_comment_to_value(&comment.author_comment),
    );
    object.insert(Name::new("body"), Value::String(comment.body.clone()));
    object.insert(Name::new("time"), Value::String(comment.time.to_rfc3339()));

    Value::Object(object)
}

fn author_comment_to_value(author_comment: &AuthorComment) -> Value {
    let mut object = IndexMap::new();

    object.insert(
        Name::new("name"),
        Value::String(author_comment.name.clone()),
    );
    object.insert(
        Name::new("email"),
        Value::String(author_comment.email.clone()),
    );

    Value::Object(object)
}
