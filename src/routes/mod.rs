pub(crate) mod health;
pub(crate) mod root;
pub(crate) mod market;
pub(crate) mod portfolio;
pub(crate) mod ml;
pub(crate) mod dashboard;
