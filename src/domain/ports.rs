use serde::Serialize;
use std::fmt;

/// One of the five ways a vehicle engine can be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartMethod {
    Key,
    Button,
    RemoteKeyFob,
    App,
    ManualCrank,
}

impl StartMethod {
    pub const ALL: [StartMethod; 5] = [
        StartMethod::Key,
        StartMethod::Button,
        StartMethod::RemoteKeyFob,
        StartMethod::App,
        StartMethod::ManualCrank,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StartMethod::Key => "key",
            StartMethod::Button => "button",
            StartMethod::RemoteKeyFob => "remote key fob",
            StartMethod::App => "app",
            StartMethod::ManualCrank => "manual crank",
        }
    }
}

impl fmt::Display for StartMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Engine-start capability set.
///
/// Every operation simulates a hardware handshake: a trigger check and an
/// engine readiness check, both of which currently always pass. Implementors
/// override only the methods they specialize and list them in
/// [`EngineStart::overridden_methods`].
pub trait EngineStart {
    fn start_engine_via_key(&self) -> bool {
        let key_detected = true;
        let engine_ready = true;
        key_detected && engine_ready
    }

    fn start_engine_via_button(&self) -> bool {
        let button_pressed = true;
        let engine_ready = true;
        button_pressed && engine_ready
    }

    fn start_engine_remotely_via_key_fob(&self) -> bool {
        let remote_signal_received = true;
        let engine_ready = true;
        remote_signal_received && engine_ready
    }

    fn start_engine_via_app(&self) -> bool {
        let app_command_received = true;
        let engine_ready = true;
        app_command_received && engine_ready
    }

    fn start_engine_via_manual_crank(&self) -> bool {
        let crank_operated = true;
        let engine_ready = true;
        crank_operated && engine_ready
    }

    fn overridden_methods(&self) -> &'static [StartMethod] {
        &[]
    }

    fn start(&self, method: StartMethod) -> bool {
        match method {
            StartMethod::Key => self.start_engine_via_key(),
            StartMethod::Button => self.start_engine_via_button(),
            StartMethod::RemoteKeyFob => self.start_engine_remotely_via_key_fob(),
            StartMethod::App => self.start_engine_via_app(),
            StartMethod::ManualCrank => self.start_engine_via_manual_crank(),
        }
    }
}
