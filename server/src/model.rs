use serde::{Deserialize, Serialize};

/// A single to-do record.
///
/// Every field is optional on input: a missing `id` reads as `0` (ask the
/// store to allocate one), a missing `title` as `null` and a missing
/// `completed` as `false`. Output always carries all three fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoItem {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl ToDoItem {
    pub fn new(id: i64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: Some(title.into()),
            completed,
        }
    }

    /// Apply an update body to this record.
    ///
    /// `title` is only replaced when the patch carries one. `completed` is
    /// always taken from the patch, so a body that omits it resets the item
    /// to not completed. The patch `id` is ignored.
    pub fn merge(&mut self, patch: ToDoItem) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        self.completed = patch.completed;
    }
}
