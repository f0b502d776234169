//! Contact Intake API Library
//!
//! Backend for the consulting site's contact form and public content. A lead
//! submission is validated, rendered into text and HTML email bodies, and
//! handed to a transactional email provider (Resend). Services, FAQ items,
//! the "about us" global and service page settings are served read-only from
//! a cached content document.
//!
//! # Modules
//!
//! - `app`: Router assembly and middleware.
//! - `config`: Configuration management.
//! - `content_models`: Site content types and their named defaults.
//! - `content_store`: Content sources and the bounded content cache.
//! - `dispatcher`: Maps email-send outcomes to responses.
//! - `errors`: Error handling types.
//! - `formatter`: Plain-text and HTML rendering of a lead.
//! - `handlers`: HTTP request handlers.
//! - `mailer`: Email capability trait and the Resend client.
//! - `models`: Lead submission data model.
//! - `sanitizer`: HTML escaping.
//! - `validation`: Contact-form validation.

pub mod app;
pub mod config;
pub mod content_models;
pub mod content_store;
pub mod dispatcher;
pub mod errors;
pub mod formatter;
pub mod handlers;
pub mod mailer;
pub mod models;
pub mod sanitizer;
pub mod validation;
