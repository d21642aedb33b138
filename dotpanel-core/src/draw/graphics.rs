//! embedded-graphics support
//!
//! The surface accepts `Gray8` pixels; the luma is used as the intensity,
//! so primitives from the embedded-graphics ecosystem are blended with the
//! session colours and clipped like every other drawing call.

use core::convert::Infallible;

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::{Gray8, GrayColor};
use embedded_graphics_core::Pixel;

use super::surface::Surface;

impl DrawTarget for Surface<'_> {
    type Color = Gray8;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (i16::try_from(point.x), i16::try_from(point.y)) else {
                continue;
            };
            self.pixel(x, y, color.luma());
        }
        Ok(())
    }
}

impl OriginDimensions for Surface<'_> {
    fn size(&self) -> Size {
        Size::new(self.width().into(), self.height().into())
    }
}
