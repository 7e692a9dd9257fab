pub mod domain;

#[cfg(test)]
mod tests_error_mapping;
