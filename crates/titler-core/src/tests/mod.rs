mod document;
mod title;

use crate::Idea;

pub(crate) fn buy_milk() -> Vec<Idea> {
    vec![Idea::new("Buy milk", "Need 2% milk from store")]
}
