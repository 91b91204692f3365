mod configuration;
mod progress;
mod words;
