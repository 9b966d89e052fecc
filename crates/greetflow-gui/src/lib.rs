//! GreetFlow - GUI Library
//!
//! Desktop front end for the GreetFlow greeting form.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod message;
pub mod service;
pub mod settings;
pub mod theme;
pub mod view;
