//! Academic resources lookup.
//!
//! Read-only access to semesters, subjects, lab manuals, question papers
//! and notes. Rows are returned as stored, so adding a column to a table
//! shows up in the API without a code change.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | List all semesters |
//! | GET | `/subjects/{sem_key}` | List subjects of a semester |
//! | GET | `/lab_manual/{sem_id}` | Lab manual links of a semester |
//! | GET | `/subject/papers/{sub_id}` | List question papers of a subject |
//! | GET | `/subject/notes/{sub_id}` | List notes of a subject, by title |

pub mod handlers;
pub mod routes;
pub mod services;

pub use services::ResourceService;
