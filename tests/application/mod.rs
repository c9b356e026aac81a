mod credential_cache_test;
mod refinement_service_test;
mod ticket_service_test;
mod transcription_service_test;
