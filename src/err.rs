use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum SeqErr {
    #[error("[Single] Sequence yielded no element, exactly one is required")]
    Empty,

    #[error("[Single] Sequence yielded more than one element, exactly one is required")]
    MoreThanOne,
}
