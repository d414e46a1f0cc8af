pub mod authorization_facade_impl;
