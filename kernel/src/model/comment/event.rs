use crate::model::id::{ItemId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CreateComment {
    pub item_id: ItemId,
    pub author_id: UserId,
    pub text: String,
}
