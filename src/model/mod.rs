/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Request and response envelopes
pub mod envelope;
/// HTTP transport with status code validation
pub mod http;
/// Pagination query helpers
pub mod pagination;
