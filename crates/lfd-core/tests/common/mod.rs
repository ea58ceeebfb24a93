pub mod artifact_server;
