use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use slabform::entities::{LayoutContext, Part, SlabLayout};
use slabform::geometry::primitives::{Outline, Point, Rect};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Definitions, Group, Path, Text, Title, Use};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw a marker at every insertion point
    #[serde(default)]
    pub point_markers: bool,
    ///Draw the working rectangle on top of the slab outline
    #[serde(default)]
    pub draw_frame: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            point_markers: false,
            draw_frame: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub slab_fill: Color,
    pub cast_fill: Color,
    pub lp_fill: Color,
    pub ld_fill: Color,
    pub lds_fill: Color,
    pub start_lp_fill: Color,
    pub head_fill: Color,
    pub end_lp_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::TIMBER
    }
}

impl SvgLayoutTheme {
    pub const TIMBER: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        slab_fill: Color(0xD9, 0xD4, 0xCC),
        cast_fill: Color(0xFF, 0xC8, 0x79),
        lp_fill: Color(0xE0, 0xA8, 0x38),
        ld_fill: Color(0xB9, 0x78, 0x3F),
        lds_fill: Color(0x8C, 0x5A, 0x2B),
        start_lp_fill: Color(0xF0, 0xDE, 0xA8),
        head_fill: Color(0x6A, 0x7B, 0x8C),
        end_lp_color: Color(0xD0, 0x00, 0x00),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        slab_fill: Color(0xD3, 0xD3, 0xD3),
        cast_fill: Color(0xAD, 0xAD, 0xAD),
        lp_fill: Color(0x7A, 0x7A, 0x7A),
        ld_fill: Color(0x63, 0x63, 0x63),
        lds_fill: Color(0x4A, 0x4A, 0x4A),
        start_lp_fill: Color(0x94, 0x94, 0x94),
        head_fill: Color(0x2D, 0x2D, 0x2D),
        end_lp_color: Color(0xD0, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<String> for Color {
    fn from(mut s: String) -> Self {
        if s.starts_with('#') {
            s.remove(0);
        }
        let r = u8::from_str_radix(&s[0..2], 16).unwrap();
        let g = u8::from_str_radix(&s[2..4], 16).unwrap();
        let b = u8::from_str_radix(&s[4..6], 16).unwrap();
        Color(r, g, b)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::from(s.to_owned())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&*format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Color::from(s))
    }
}

pub fn layout_to_svg(
    ctx: &LayoutContext,
    layout: &SlabLayout,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    //corners are validated at context construction
    let frame = Rect {
        x_min: ctx.start.0,
        y_min: ctx.start.1,
        x_max: ctx.max.0,
        y_max: ctx.max.1,
    };
    let vbox = Rect::bounding_rect(frame, ctx.outline.bbox).scale(1.10);

    let theme = &options.theme;

    let stroke_width =
        f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the slab
        let bbox = ctx.outline.bbox;

        let label_content = format!(
            "width: {:.3} | height: {:.3} | points: {} | {}",
            bbox.width(),
            bbox.height(),
            layout.total_points(),
            title,
        );
        Text::new(label_content)
            .set("x", bbox.x_min)
            .set(
                "y",
                bbox.y_min - 0.5 * 0.025 * f64::min(bbox.width(), bbox.height()),
            )
            .set("font-size", f64::min(bbox.width(), bbox.height()) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw the slab outline
    let slab_group = {
        let bbox = ctx.outline.bbox;
        let title = Title::new(format!(
            "slab, bbox: [x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
            bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max
        ));

        Group::new()
            .set("id", "slab")
            .add(data_to_path(
                outline_data(&ctx.outline),
                &[
                    ("fill", &*format!("{}", theme.slab_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            ))
            .add(title)
    };

    //one def with the template rectangle per category, one use per insertion point
    let part_group = |id: &str, part: &Part, points: &[Point], rotation: f64, fill: Color| {
        let defs = Definitions::new().add(
            Group::new().set("id", id.to_string()).add(data_to_path(
                part_data(part),
                &[
                    ("fill", &*format!("{fill}")),
                    ("fill-opacity", "0.8"),
                    ("stroke", &*format!("{}", change_brightness(fill, 0.5))),
                    ("stroke-width", &*format!("{stroke_width}")),
                ],
            )),
        );
        points.iter().fold(
            Group::new().set("id", format!("{id}_points")).add(defs),
            |group, p| {
                let placement = Use::new()
                    .set("transform", place_to_svg(*p, rotation))
                    .set("xlink:href", format!("#{id}"))
                    .add(Title::new(format!("{} ({:.3}, {:.3})", part.name, p.0, p.1)));
                group.add(placement)
            },
        )
    };

    let lattice_rotation = 90.0 - ctx.options.global_orientation_angle;
    let cast_rotation = 90.0 - ctx.options.orientation_angle;

    let mut document = Document::new()
        .set(
            "viewBox",
            (vbox.x_min, vbox.y_min, vbox.width(), vbox.height()),
        )
        .set("xmlns:xlink", "http://www.w3.org/1999/xlink")
        .add(slab_group);

    if options.draw_frame {
        document = document.add(
            data_to_path(
                aa_rect_data(frame),
                &[
                    ("fill", "none"),
                    ("stroke", "black"),
                    ("stroke-opacity", "0.5"),
                    ("stroke-width", &*format!("{stroke_width}")),
                    ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                ],
            )
            .set("id", "frame"),
        );
    }

    if let Some(cast) = &layout.cast {
        document = document.add(part_group(
            "cast",
            &ctx.parts.cast,
            cast,
            cast_rotation,
            theme.cast_fill,
        ));
    }
    document = document.add(part_group(
        "ld",
        &ctx.parts.ld,
        &layout.ld,
        lattice_rotation,
        theme.ld_fill,
    ));
    if let Some(lds) = &layout.lds {
        document = document.add(part_group(
            "lds",
            &ctx.parts.ld,
            lds,
            lattice_rotation,
            theme.lds_fill,
        ));
    }
    if let (Some(start_lp), Some(part)) = (&layout.start_lp, &ctx.options.selected_start_lp) {
        document = document.add(part_group(
            "start_lp",
            part,
            start_lp,
            lattice_rotation,
            theme.start_lp_fill,
        ));
    }
    document = document.add(part_group(
        "lp",
        &ctx.parts.lp,
        &layout.lp,
        lattice_rotation,
        theme.lp_fill,
    ));
    document = document.add(part_group(
        "head",
        &ctx.parts.head,
        &layout.head,
        lattice_rotation,
        theme.head_fill,
    ));

    if let Some(end_lp) = &layout.end_lp {
        let mut group = Group::new().set("id", "end_lp");
        for (row, r) in end_lp {
            let Some((from, to)) = r.span else {
                continue;
            };
            group = group.add(
                data_to_path(
                    Data::new()
                        .move_to((from.0, from.1))
                        .line_to((to.0, to.1)),
                    &[
                        ("stroke", &*format!("{}", theme.end_lp_color)),
                        ("stroke-width", &*format!("{}", 3.0 * stroke_width)),
                        ("stroke-linecap", "round"),
                    ],
                )
                .add(Title::new(format!("end lp row {row}"))),
            );
        }
        document = document.add(group);
    }

    if options.point_markers {
        let mut markers = Group::new().set("id", "markers");
        let all_points = layout
            .cast
            .iter()
            .flatten()
            .chain(&layout.ld)
            .chain(layout.lds.iter().flatten())
            .chain(layout.start_lp.iter().flatten())
            .chain(&layout.lp)
            .chain(&layout.head);
        for p in all_points {
            markers = markers.add(point(*p, None, Some(2.0 * stroke_width)));
        }
        if let Some(end_lp) = &layout.end_lp {
            for r in end_lp.values() {
                markers = markers.add(point(
                    r.origin,
                    Some(&format!("{}", theme.end_lp_color)),
                    Some(2.0 * stroke_width),
                ));
            }
        }
        document = document.add(markers);
    }

    document.add(label)
}

fn place_to_svg(Point(x, y): Point, rotation: f64) -> String {
    //https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/transform
    //operations are effectively applied from right to left
    format!("translate({x} {y}), rotate({rotation})")
}

pub fn outline_data(outline: &Outline) -> Data {
    let mut data = Data::new().move_to::<(f64, f64)>(outline.vertices[0].into());
    for vertex in &outline.vertices[1..] {
        data = data.line_to::<(f64, f64)>((*vertex).into());
    }
    data.close()
}

/// Template rectangle of a part, pivot correction applied.
pub fn part_data(part: &Part) -> Data {
    let Point(x, y) = part.pivot;
    Data::new()
        .move_to((x, y))
        .line_to((x + part.width, y))
        .line_to((x + part.width, y + part.height))
        .line_to((x, y + part.height))
        .close()
}

pub fn aa_rect_data(rect: Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn point(Point(x, y): Point, fill: Option<&str>, rad: Option<f64>) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad.unwrap_or(0.5))
        .set("fill", fill.unwrap_or("black"))
}
