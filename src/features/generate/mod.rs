//! Prompt relay.
//!
//! Forwards a prompt to the generative language API as a single user
//! turn and returns the answer reformatted into plain text.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/generate` | Generate and reformat an answer |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::GenerateService;
