mod cors_test;
mod helpers;
mod routing_test;
