pub mod limit;
pub mod parse;
pub mod session;

#[cfg(test)]
pub mod testing;
