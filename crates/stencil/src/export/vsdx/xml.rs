//! Page and page-index XML.

use std::io::Cursor;

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use stencil_core::{
    draw::{Path, PathCommand, ShapePrimitive, TextBlock},
    geometry::{Point, round4},
};

use crate::{export::Error, layout::Page};

type XmlWriter = Cursor<Vec<u8>>;

type Result<T> = std::result::Result<T, Error>;

const VISIO_NS: &str = "http://schemas.microsoft.com/office/visio/2012/main";
const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Formats a number the way every cell value is written.
fn num(value: f64) -> String {
    round4(value).to_string()
}

fn write_decl(writer: &mut Writer<XmlWriter>) -> Result<()> {
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(Error::Xml)
}

fn write_tag_start_with_attrs(
    writer: &mut Writer<XmlWriter>,
    tag_name: &str,
    attrs: &[(&str, &str)],
) -> Result<()> {
    let mut elem = BytesStart::new(tag_name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    writer.write_event(Event::Start(elem)).map_err(Error::Xml)
}

fn write_tag_empty_with_attrs(
    writer: &mut Writer<XmlWriter>,
    tag_name: &str,
    attrs: &[(&str, &str)],
) -> Result<()> {
    let mut elem = BytesStart::new(tag_name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    writer.write_event(Event::Empty(elem)).map_err(Error::Xml)
}

fn write_tag_end(writer: &mut Writer<XmlWriter>, tag_name: &str) -> Result<()> {
    writer
        .write_event(Event::End(BytesEnd::new(tag_name)))
        .map_err(Error::Xml)
}

fn write_tag_text(writer: &mut Writer<XmlWriter>, content: &str) -> Result<()> {
    writer
        .write_event(Event::Text(BytesText::new(content)))
        .map_err(Error::Xml)
}

fn write_cell(writer: &mut Writer<XmlWriter>, name: &str, value: &str) -> Result<()> {
    write_tag_empty_with_attrs(writer, "Cell", &[("N", name), ("V", value)])
}

fn write_num_cell(writer: &mut Writer<XmlWriter>, name: &str, value: f64) -> Result<()> {
    write_cell(writer, name, &num(value))
}

fn into_string(writer: Writer<XmlWriter>) -> String {
    // Everything written is valid UTF-8 text.
    String::from_utf8_lossy(&writer.into_inner().into_inner()).into_owned()
}

/// Serializes `visio/pages/pages.xml`: the single page, its name and size.
pub(super) fn pages_xml(page: &Page, title: &str) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_decl(&mut writer)?;

    write_tag_start_with_attrs(
        &mut writer,
        "Pages",
        &[("xmlns", VISIO_NS), ("xmlns:r", RELATIONSHIPS_NS)],
    )?;
    write_tag_start_with_attrs(
        &mut writer,
        "Page",
        &[("ID", "0"), ("NameU", title), ("Name", title)],
    )?;
    write_tag_start_with_attrs(&mut writer, "PageSheet", &[])?;
    write_num_cell(&mut writer, "PageWidth", page.size().width())?;
    write_num_cell(&mut writer, "PageHeight", page.size().height())?;
    write_cell(&mut writer, "DrawingScale", "1")?;
    write_cell(&mut writer, "PageScale", "1")?;
    write_tag_end(&mut writer, "PageSheet")?;
    write_tag_empty_with_attrs(&mut writer, "Rel", &[("r:id", "rId1")])?;
    write_tag_end(&mut writer, "Page")?;
    write_tag_end(&mut writer, "Pages")?;

    Ok(into_string(writer))
}

/// Serializes `visio/pages/page1.xml`: every shape in drawing order.
pub(super) fn page_xml(page: &Page) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_decl(&mut writer)?;

    write_tag_start_with_attrs(
        &mut writer,
        "PageContents",
        &[("xmlns", VISIO_NS), ("xmlns:r", RELATIONSHIPS_NS)],
    )?;
    write_tag_start_with_attrs(&mut writer, "Shapes", &[])?;
    for shape in page.shapes() {
        write_shape(&mut writer, shape)?;
    }
    write_tag_end(&mut writer, "Shapes")?;
    write_tag_end(&mut writer, "PageContents")?;

    Ok(into_string(writer))
}

fn write_shape(writer: &mut Writer<XmlWriter>, shape: &ShapePrimitive) -> Result<()> {
    let id = shape.id().to_string();
    let name = shape.name_u();
    write_tag_start_with_attrs(
        writer,
        "Shape",
        &[("ID", &id), ("NameU", &name), ("Type", "Shape")],
    )?;

    write_num_cell(writer, "PinX", shape.pin().x())?;
    write_num_cell(writer, "PinY", shape.pin().y())?;
    write_num_cell(writer, "Width", shape.size().width())?;
    write_num_cell(writer, "Height", shape.size().height())?;
    write_num_cell(writer, "LocPinX", shape.loc_pin().x())?;
    write_num_cell(writer, "LocPinY", shape.loc_pin().y())?;
    if !shape.role().is_connector() {
        for cell in ["Angle", "FlipX", "FlipY", "ResizeMode"] {
            write_cell(writer, cell, "0")?;
        }
    }

    if let Some(block) = shape.text_block() {
        write_text_block(writer, block)?;
    }
    if let Some(rounding) = shape.rounding() {
        write_num_cell(writer, "Rounding", rounding)?;
    }

    let fill = shape.fill();
    write_cell(writer, "FillForegnd", &fill.color().to_hex())?;
    write_cell(
        writer,
        "FillForegndTrans",
        if fill.is_transparent() { "1" } else { "0" },
    )?;
    write_cell(writer, "FillPattern", &fill.pattern_code().to_string())?;

    let stroke = shape.stroke();
    if stroke.is_visible() {
        write_num_cell(writer, "LineWeight", stroke.weight())?;
        write_cell(writer, "LineColor", &stroke.color().to_hex())?;
    }
    write_cell(writer, "LinePattern", &stroke.pattern().code().to_string())?;

    if let Some(text_def) = shape.text_def() {
        write_tag_start_with_attrs(writer, "Section", &[("N", "Character"), ("IX", "0")])?;
        write_tag_start_with_attrs(writer, "Row", &[("IX", "0")])?;
        write_cell(writer, "Font", "0")?;
        write_num_cell(writer, "Size", text_def.font_size_in())?;
        write_cell(writer, "Color", &text_def.color().to_hex())?;
        write_tag_end(writer, "Row")?;
        write_tag_end(writer, "Section")?;

        if !shape.role().is_connector() {
            write_tag_start_with_attrs(writer, "Section", &[("N", "Paragraph"), ("IX", "0")])?;
            write_tag_start_with_attrs(writer, "Row", &[("IX", "0")])?;
            write_cell(writer, "HorzAlign", &text_def.align().code().to_string())?;
            write_tag_end(writer, "Row")?;
            write_tag_end(writer, "Section")?;
        }
    }

    for (index, path) in shape.paths().iter().enumerate() {
        write_geometry(writer, index, path)?;
    }

    if let Some(text) = shape.text() {
        write_tag_start_with_attrs(writer, "Text", &[])?;
        write_tag_text(writer, text)?;
        write_tag_end(writer, "Text")?;
    }

    write_tag_end(writer, "Shape")
}

fn write_text_block(writer: &mut Writer<XmlWriter>, block: &TextBlock) -> Result<()> {
    write_num_cell(writer, "TxtAngle", block.angle())?;
    write_num_cell(writer, "TxtPinX", block.pin().x())?;
    write_num_cell(writer, "TxtPinY", block.pin().y())?;
    write_num_cell(writer, "TxtWidth", block.size().width())?;
    write_num_cell(writer, "TxtHeight", block.size().height())?;
    write_num_cell(writer, "TxtLocPinX", block.loc_pin().x())?;
    write_num_cell(writer, "TxtLocPinY", block.loc_pin().y())
}

fn write_geometry(writer: &mut Writer<XmlWriter>, index: usize, path: &Path) -> Result<()> {
    let ix = index.to_string();
    write_tag_start_with_attrs(writer, "Section", &[("N", "Geometry"), ("IX", &ix)])?;
    write_cell(writer, "NoFill", if path.is_filled() { "0" } else { "1" })?;
    write_cell(writer, "NoLine", if path.is_stroked() { "0" } else { "1" })?;

    for (row, command) in path.commands().iter().enumerate() {
        let row_ix = (row + 1).to_string();
        write_tag_start_with_attrs(
            writer,
            "Row",
            &[("T", command.row_type()), ("IX", &row_ix)],
        )?;
        match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => write_xy(writer, p)?,
            PathCommand::ArcTo { end, bow } => {
                write_xy(writer, end)?;
                write_num_cell(writer, "A", bow)?;
            }
            PathCommand::Ellipse {
                center,
                major,
                minor,
            } => {
                write_xy(writer, center)?;
                write_num_cell(writer, "A", major.x())?;
                write_num_cell(writer, "B", major.y())?;
                write_num_cell(writer, "C", minor.x())?;
                write_num_cell(writer, "D", minor.y())?;
            }
        }
        write_tag_end(writer, "Row")?;
    }

    write_tag_end(writer, "Section")
}

fn write_xy(writer: &mut Writer<XmlWriter>, point: Point) -> Result<()> {
    write_num_cell(writer, "X", point.x())?;
    write_num_cell(writer, "Y", point.y())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(0.375), "0.375");
        assert_eq!(num(11.0), "11");
        assert_eq!(num(-0.00001), "0");
        assert_eq!(num(std::f64::consts::FRAC_PI_2), "1.5708");
    }
}
