use catalog_domain::entity::Entity;
use catalog_macros::{entity, entity_id};

#[entity_id]
struct ShelfId(String);

#[entity(id = ShelfId)]
struct Shelf {
    label: String,
}

// id 已存在时会被挪到最前而不是重复追加
#[entity]
struct Note {
    body: String,
    id: String,
}

fn main() {
    let shelf = Shelf {
        id: ShelfId::new("s-1".to_string()),
        label: "top".to_string(),
    };
    assert_eq!(shelf.id().to_string(), "s-1");
    assert!(shelf.same_identity_as(&shelf.clone()));
    let _ = format!("{:?}", shelf);

    let note = Note {
        id: "n-1".to_string(),
        body: "hi".to_string(),
    };
    assert_eq!(note.id(), "n-1");
}
