pub(crate) mod get_health;
