//! Route planner server.
//!
//! A web application that answers: "What are my options for getting from
//! here to there, and which one should I take?" over a small fixed road
//! network, for walking, cycling or driving.

pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
