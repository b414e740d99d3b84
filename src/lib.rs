pub mod cli;
pub mod index;
pub mod metrics;
pub mod report;
pub mod trace;

#[cfg(test)]
mod test;
