use std::fmt::{Display, Error, Formatter, Result, Write};

/// Displays the XML written by a closure
pub(crate) struct XmlProducer<F>(F)
where
    F: Fn(&mut Xml<'_, '_>) -> Result;

impl<F> XmlProducer<F>
where
    F: Fn(&mut Xml<'_, '_>) -> Result,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Display for XmlProducer<F>
where
    F: Fn(&mut Xml<'_, '_>) -> Result,
{
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        let mut xml = Xml::new(fmt);
        (self.0)(&mut xml)?;
        xml.finish()
    }
}

/// Streams XML elements to a formatter. Elements left open are closed by `finish`.
pub(crate) struct Xml<'a, 'b> {
    writer: &'a mut Formatter<'b>,
    elements: Vec<&'static str>,
    in_tag: bool,
}

impl<'a, 'b> Xml<'a, 'b> {
    pub fn new(writer: &'a mut Formatter<'b>) -> Self {
        Self {
            writer,
            elements: Vec::new(),
            in_tag: false,
        }
    }
}

impl Xml<'_, '_> {
    pub fn open_element(&mut self, name: &'static str) -> Result {
        self.end_tag()?;
        self.in_tag = true;
        self.elements.push(name);
        write!(self.writer, "<{}", name)
    }

    pub fn attribute(&mut self, name: &'static str, value: impl Display) -> Result {
        if !self.in_tag {
            return Err(Error);
        }
        write!(self.writer, r#" {}=""#, name)?;
        write!(Escape(&mut *self.writer), "{}", value)?;
        self.writer.write_char('"')
    }

    pub fn close_element(&mut self) -> Result {
        let name = self.elements.pop().ok_or(Error)?;
        if self.in_tag {
            self.in_tag = false;
            writeln!(self.writer, "/>")
        } else {
            writeln!(self.writer, "</{}>", name)
        }
    }

    pub fn text(&mut self, text: impl Display) -> Result {
        if self.in_tag {
            self.writer.write_char('>')?;
            self.in_tag = false;
        }
        write!(Escape(&mut *self.writer), "{}", text)
    }

    pub fn finish(&mut self) -> Result {
        if self.in_tag {
            self.in_tag = false;
            writeln!(self.writer, "/>")?;
        }
        while let Some(name) = self.elements.pop() {
            writeln!(self.writer, "</{}>", name)?;
        }
        Ok(())
    }

    fn end_tag(&mut self) -> Result {
        if self.in_tag {
            self.in_tag = false;
            writeln!(self.writer, ">")?;
        }
        Ok(())
    }
}

/// Replaces characters which have a meaning in XML
struct Escape<'a, 'b>(&'a mut Formatter<'b>);

impl Write for Escape<'_, '_> {
    fn write_str(&mut self, s: &str) -> Result {
        for c in s.chars() {
            match c {
                '<' => self.0.write_str("&lt;")?,
                '>' => self.0.write_str("&gt;")?,
                '&' => self.0.write_str("&amp;")?,
                '"' => self.0.write_str("&quot;")?,
                c => self.0.write_char(c)?,
            }
        }
        Ok(())
    }
}

macro_rules! xml {
    ($($xml:expr $(,)?)?) => {};

    ($xml:expr, open $name:literal $(, $($tail:tt)*)?) => {
        $xml.open_element($name)?;
        $(xml!($xml, $($tail)*))?
    };

    ($xml:expr, $arg_name:literal = $arg_value:expr $(, $($tail:tt)*)?) => {
        $xml.attribute($arg_name, $arg_value)?;
        $(xml!($xml, $($tail)*))?
    };

    ($xml:expr, text = $text:expr $(, $($tail:tt)*)?) => {
        $xml.text($text)?;
        $(xml!($xml, $($tail)*))?
    };

    ($xml:expr, close $(, $($tail:tt)*)?) => {
        $xml.close_element()?;
        $(xml!($xml, $($tail)*))?
    };
}
