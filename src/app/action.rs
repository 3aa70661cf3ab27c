#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
}
