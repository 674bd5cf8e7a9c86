pub mod event_scheduler;
