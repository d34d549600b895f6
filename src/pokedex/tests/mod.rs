pub mod common;


#[cfg(test)]
mod test_navigation;


#[cfg(test)]
mod test_exploration;
