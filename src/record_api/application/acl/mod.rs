pub mod authorization_gateway_impl;
