//! Camera pose and flight model.
//!
//! Each of the six axes (forward, pitch, yaw, lift, strafe, roll) integrates
//! its own velocity with separate acceleration and braking rates. Altitude is
//! the exception: Up/Down move it by a fixed amount per tick.
//!
//! Strafe and lift are fully modelled but no key drives them; they coast at
//! zero and are kept so a future binding only has to feed them a [`Drive`].

use std::f32::consts::FRAC_PI_2;

use crate::keys::KeyStates;
use crate::types::{Key, CLIMB_PER_TICK, MAX_CAMERA_HEIGHT, MIN_CAMERA_HEIGHT};

/// Direction an axis is pushed this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Drive {
    Positive,
    Negative,
    #[default]
    Idle,
}

impl Drive {
    /// `positive` wins when both keys are held.
    pub fn from_pair(positive: bool, negative: bool) -> Self {
        if positive {
            Drive::Positive
        } else if negative {
            Drive::Negative
        } else {
            Drive::Idle
        }
    }

    pub fn inverted(self) -> Self {
        match self {
            Drive::Positive => Drive::Negative,
            Drive::Negative => Drive::Positive,
            Drive::Idle => Drive::Idle,
        }
    }
}

/// Velocity state of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDynamics {
    pub velocity: f32,
    pub acceleration: f32,
    pub brake: f32,
    pub max_velocity: f32,
}

impl AxisDynamics {
    pub const fn new(acceleration: f32, brake: f32, max_velocity: f32) -> Self {
        Self {
            velocity: 0.0,
            acceleration,
            brake,
            max_velocity,
        }
    }

    /// Advance one tick.
    ///
    /// Pushing against the current motion uses the (usually larger) brake rate
    /// so reversing crosses zero faster than accelerating from rest. An axis
    /// held at its bound stays there; an undriven axis decays toward zero
    /// without overshooting.
    pub fn step(&mut self, drive: Drive) {
        let max = self.max_velocity;
        match drive {
            Drive::Positive => {
                if self.velocity < max {
                    let inc = if self.velocity < 0.0 {
                        self.brake
                    } else {
                        self.acceleration
                    };
                    self.velocity = (self.velocity + inc).min(max);
                }
            }
            Drive::Negative => {
                if self.velocity > -max {
                    let dec = if self.velocity > 0.0 {
                        self.brake
                    } else {
                        self.acceleration
                    };
                    self.velocity = (self.velocity - dec).max(-max);
                }
            }
            Drive::Idle => {
                if self.velocity - self.brake > 0.0 {
                    self.velocity -= self.brake;
                } else if self.velocity + self.brake < 0.0 {
                    self.velocity += self.brake;
                } else {
                    self.velocity = 0.0;
                }
            }
        }
    }
}

/// Per-tick control intents, already resolved from key states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlightIntents {
    /// Forward (W) / back (S).
    pub throttle: Drive,
    /// Right (D) positive / left (A) negative.
    pub turn: Drive,
    /// Up arrow positive / Down arrow negative. Both held cancel out.
    pub climb: (bool, bool),
    /// Reserved: no key is bound.
    pub strafe: Drive,
    /// Reserved: no key is bound.
    pub lift: Drive,
}

impl FlightIntents {
    pub fn from_keys(keys: &KeyStates) -> Self {
        Self {
            throttle: Drive::from_pair(keys.pressed(Key::W), keys.pressed(Key::S)),
            // A is checked first for yaw.
            turn: Drive::from_pair(keys.pressed(Key::A), keys.pressed(Key::D)).inverted(),
            climb: (keys.pressed(Key::Up), keys.pressed(Key::Down)),
            strafe: Drive::Idle,
            lift: Drive::Idle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub x: f32,
    pub y: f32,
    height: f32,
    pitch: f32,
    pub yaw: f32,

    pub forward: AxisDynamics,
    pub pitch_axis: AxisDynamics,
    pub yaw_axis: AxisDynamics,
    pub lift: AxisDynamics,
    pub strafe: AxisDynamics,
    pub roll: AxisDynamics,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            x: 512.0,
            y: 512.0,
            height: 80.0,
            pitch: 0.0,
            yaw: 0.0,
            forward: AxisDynamics::new(0.06, 0.1, 3.0),
            pitch_axis: AxisDynamics::new(0.16, 0.06, 2.0),
            yaw_axis: AxisDynamics::new(0.10, 0.10, 1.0),
            lift: AxisDynamics::new(0.06, 0.07, 1.0),
            strafe: AxisDynamics::new(0.05, 0.09, 1.0),
            roll: AxisDynamics::new(0.04, 0.09, 1.0),
        }
    }
}

impl CameraState {
    pub fn at(x: f32, y: f32, height: f32, yaw: f32) -> Self {
        let mut cam = Self {
            x,
            y,
            yaw,
            ..Self::default()
        };
        cam.set_height(height);
        cam
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = if height.is_nan() {
            MIN_CAMERA_HEIGHT
        } else {
            height.clamp(MIN_CAMERA_HEIGHT, MAX_CAMERA_HEIGHT)
        };
    }

    /// Vertical screen offset of the horizon, derived from pitch velocity.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Override the derived pitch offset until the next update.
    #[cfg(test)]
    pub(crate) fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
    }

    pub fn roll_velocity(&self) -> f32 {
        self.roll.velocity
    }

    /// Advance the pose by one tick.
    pub fn update(&mut self, intents: FlightIntents) {
        // Throttle also tips the view: W raises the pitch offset's velocity
        // in the negative direction.
        self.forward.step(intents.throttle);
        self.pitch_axis.step(intents.throttle.inverted());

        // Turning banks the opposite way.
        self.yaw_axis.step(intents.turn);
        self.roll.step(intents.turn.inverted());

        self.strafe.step(intents.strafe);
        self.lift.step(intents.lift);

        let (up, down) = intents.climb;
        if up {
            self.set_height(self.height + CLIMB_PER_TICK);
        }
        if down {
            self.set_height(self.height - CLIMB_PER_TICK);
        }

        let (sin, cos) = self.yaw.sin_cos();
        let (side_sin, side_cos) = (self.yaw + FRAC_PI_2).sin_cos();
        self.x += cos * self.forward.velocity * 0.9 + side_cos * self.strafe.velocity * 0.5;
        self.y += sin * self.forward.velocity * 0.9 + side_sin * self.strafe.velocity * 0.5;

        self.yaw += self.yaw_axis.velocity * 0.02;
        self.set_height(self.height + self.lift.velocity * 1.4);
        self.pitch = self.pitch_axis.velocity * 20.0 + 80.0;
    }

    pub fn axes(&self) -> [&AxisDynamics; 6] {
        [
            &self.forward,
            &self.pitch_axis,
            &self.yaw_axis,
            &self.lift,
            &self.strafe,
            &self.roll,
        ]
    }
}
