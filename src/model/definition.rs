#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDefinition {
    pub name: String,
    pub markup: String,
}
