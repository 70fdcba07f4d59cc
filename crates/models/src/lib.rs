pub mod errors;
pub mod db;
pub mod country;

#[cfg(test)]
mod tests;
