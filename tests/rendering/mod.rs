mod attributes;
mod blocks;
mod includes;
mod pipelines;
