//! Host-side model of the registers used by this crate.

use std::cell::RefCell;

use crate::gpio::Port;
use crate::{clock, Register, Registers};

/// AHBENR after reset: SRAM and flash interface clocks running.
const AHB_ENABLE_RESET: u32 = 0x0000_0014;
/// MODER of port A after reset: SWDIO and SWCLK in alternate function mode.
const PORT_A_MODE_RESET: u32 = 0x2800_0000;

/// One register access, in program order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Read(Register),
    Write(Register, u32),
}

/// Simulated register file with clock gating.
///
/// Accesses to a port whose clock is off have no effect, read as zero and are
/// recorded as [gated][Simulator::gated].
#[derive(Debug)]
pub struct Simulator {
    ahb_enable: u32,
    mode: [u32; 5],
    output: [u32; 5],
    input: [u32; 5],
    log: RefCell<Vec<Access>>,
    gated: RefCell<Vec<Access>>,
}

impl Simulator {
    pub fn new() -> Self {
        let mut mode = [0; 5];
        mode[index(Port::A)] = PORT_A_MODE_RESET;
        Self {
            ahb_enable: AHB_ENABLE_RESET,
            mode,
            output: [0; 5],
            input: [0; 5],
            log: RefCell::new(Vec::new()),
            gated: RefCell::new(Vec::new()),
        }
    }

    /// Register value, bypassing clock gating and the log.
    pub fn peek(&self, reg: Register) -> u32 {
        match reg {
            Register::AhbEnable => self.ahb_enable,
            Register::Mode(port) => self.mode[index(port)],
            Register::OutputData(port) => self.output[index(port)],
            Register::InputData(port) => self.input[index(port)],
        }
    }

    /// Set a register value, bypassing clock gating and the log.
    pub fn poke(&mut self, reg: Register, value: u32) {
        *self.slot(reg) = value;
    }

    /// Every access so far.
    pub fn log(&self) -> Vec<Access> {
        self.log.borrow().clone()
    }

    /// Accesses that hit a port with its clock off.
    pub fn gated(&self) -> Vec<Access> {
        self.gated.borrow().clone()
    }

    /// Position of the first write to `reg` in the log.
    pub fn first_write(&self, reg: Register) -> Option<usize> {
        self.log
            .borrow()
            .iter()
            .position(|access| matches!(access, Access::Write(r, _) if *r == reg))
    }

    fn slot(&mut self, reg: Register) -> &mut u32 {
        match reg {
            Register::AhbEnable => &mut self.ahb_enable,
            Register::Mode(port) => &mut self.mode[index(port)],
            Register::OutputData(port) => &mut self.output[index(port)],
            Register::InputData(port) => &mut self.input[index(port)],
        }
    }

    fn clocked(&self, reg: Register) -> bool {
        match reg {
            Register::AhbEnable => true,
            Register::Mode(port) | Register::OutputData(port) | Register::InputData(port) => {
                self.ahb_enable & clock::port_mask(port) != 0
            }
        }
    }
}

impl Registers for Simulator {
    fn read(&self, reg: Register) -> u32 {
        let access = Access::Read(reg);
        self.log.borrow_mut().push(access);
        if !self.clocked(reg) {
            self.gated.borrow_mut().push(access);
            return 0;
        }
        self.peek(reg)
    }

    fn write(&mut self, reg: Register, value: u32) {
        let access = Access::Write(reg, value);
        self.log.get_mut().push(access);
        if !self.clocked(reg) {
            self.gated.get_mut().push(access);
            return;
        }
        if let Register::InputData(_) = reg {
            return;
        }
        *self.slot(reg) = value;
    }
}

fn index(port: Port) -> usize {
    port as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gated_port_ignores_writes() {
        let mut sim = Simulator::new();
        sim.write(Register::Mode(Port::C), 0x1);

        assert_eq!(sim.peek(Register::Mode(Port::C)), 0);
        assert_eq!(sim.gated(), vec![Access::Write(Register::Mode(Port::C), 0x1)]);
    }

    #[test]
    fn input_register_is_read_only() {
        let mut sim = Simulator::new();
        clock::enable(&mut sim, Port::A);
        sim.write(Register::InputData(Port::A), 0xFFFF);

        assert_eq!(sim.read(Register::InputData(Port::A)), 0);
        assert!(sim.gated().is_empty());
    }
}
