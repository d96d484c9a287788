//! External service clients.

pub mod pinecone;
