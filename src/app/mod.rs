pub mod bank_service;
