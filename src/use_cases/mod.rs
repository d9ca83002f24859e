pub mod advance_game;
pub mod create_game;

#[cfg(test)]
pub(crate) mod test_support;
