use cubby_core_tree::Error as KeyError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    #[error("Serialize error: {0}")]
    Serialize(serde_json::Error),

    #[error("Deserialize error: {0}")]
    Deserialize(serde_json::Error),
}
