mod common;
mod partial_accept;
