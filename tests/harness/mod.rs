#![allow(dead_code, unused_imports)]


pub(crate) use fake_jupyter::FakeJupyter;
