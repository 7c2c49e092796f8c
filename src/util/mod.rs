#[cfg(test)]
pub mod panic;
