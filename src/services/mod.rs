// Service module exports

pub mod calendar;
pub mod event;
pub mod invite;
