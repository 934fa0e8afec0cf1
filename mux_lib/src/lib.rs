#[cfg(feature = "url_encoding")]
pub mod url_encoding; 

#[cfg(feature = "token")] 
pub mod token; 
