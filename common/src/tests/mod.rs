mod http_status;
mod redacted_secret;
mod unix_timestamp;
