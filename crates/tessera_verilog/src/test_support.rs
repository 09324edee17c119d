//! An emitter that records calls instead of writing text.

use std::io;

use tessera_fabric::BasicPort;

use crate::emitter::{NetlistEmitter, PortDirection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Header(String),
    Comment(String),
    Include(String),
    ModuleBegin(String, Vec<(PortDirection, BasicPort)>),
    Wire(BasicPort),
    Instance(String, String, Vec<BasicPort>),
    Connect(BasicPort, BasicPort),
    Constant(BasicPort, Vec<bool>),
    Blank,
    ModuleEnd(String),
}

#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) events: Vec<Event>,
}

impl Recorder {
    pub(crate) fn connections(&self) -> Vec<(BasicPort, BasicPort)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Connect(sink, source) => Some((sink.clone(), source.clone())),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn constants(&self) -> Vec<(BasicPort, Vec<bool>)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Constant(sink, values) => Some((sink.clone(), values.clone())),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn comments(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Comment(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl NetlistEmitter for Recorder {
    fn file_header(&mut self, title: &str) -> io::Result<()> {
        self.events.push(Event::Header(title.to_string()));
        Ok(())
    }

    fn comment(&mut self, text: &str) -> io::Result<()> {
        self.events.push(Event::Comment(text.to_string()));
        Ok(())
    }

    fn include(&mut self, path: &str) -> io::Result<()> {
        self.events.push(Event::Include(path.to_string()));
        Ok(())
    }

    fn module_begin(&mut self, name: &str, ports: &[(PortDirection, BasicPort)]) -> io::Result<()> {
        self.events.push(Event::ModuleBegin(name.to_string(), ports.to_vec()));
        Ok(())
    }

    fn wire(&mut self, port: &BasicPort) -> io::Result<()> {
        self.events.push(Event::Wire(port.clone()));
        Ok(())
    }

    fn instance(&mut self, module: &str, instance: &str, ports: &[BasicPort]) -> io::Result<()> {
        self.events
            .push(Event::Instance(module.to_string(), instance.to_string(), ports.to_vec()));
        Ok(())
    }

    fn connect(&mut self, sink: &BasicPort, source: &BasicPort) -> io::Result<()> {
        self.events.push(Event::Connect(sink.clone(), source.clone()));
        Ok(())
    }

    fn constant(&mut self, sink: &BasicPort, values: &[bool]) -> io::Result<()> {
        self.events.push(Event::Constant(sink.clone(), values.to_vec()));
        Ok(())
    }

    fn blank_line(&mut self) -> io::Result<()> {
        self.events.push(Event::Blank);
        Ok(())
    }

    fn module_end(&mut self, name: &str) -> io::Result<()> {
        self.events.push(Event::ModuleEnd(name.to_string()));
        Ok(())
    }
}
