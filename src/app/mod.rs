pub mod beverages;
