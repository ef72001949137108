//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! Each operation follows the same shape: load what it needs, evaluate the business
//! rules in `rules`, write, then reload the entity with its associations resolved.

pub mod group;
pub mod rules;
pub mod site;

#[cfg(test)]
mod test;
