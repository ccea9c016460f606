use async_graphql::SimpleObject;
use models::{categories, locations};

#[derive(SimpleObject)]
pub struct Category {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub slug: String,
}

impl From<categories::Model> for Category {
    fn from(c: categories::Model) -> Self {
        Category {
            id: c.id,
            title: c.title,
            description: c.description,
            slug: c.slug,
        }
    }
}

#[derive(SimpleObject)]
pub struct Location {
    pub id: i32,
    pub name: String,
}

impl From<locations::Model> for Location {
    fn from(l: locations::Model) -> Self {
        Location { id: l.id, name: l.name }
    }
}
